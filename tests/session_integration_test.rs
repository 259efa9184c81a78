use secret_santa::{Session, SessionOptions, SessionState};
use std::io::Cursor;

fn run_script(script: &str, options: SessionOptions) -> (String, SessionState, Vec<String>) {
    let mut output = Vec::new();
    let (state, roster) = {
        let mut session = Session::new(Cursor::new(script.to_string()), &mut output, options);
        session.run().unwrap();
        (session.state().clone(), session.roster().names().to_vec())
    };
    (String::from_utf8(output).unwrap(), state, roster)
}

#[test]
fn test_done_requires_minimum_participants() {
    let (output, state, roster) = run_script("alice\nbob\ndone\nend\n", SessionOptions::default());

    assert!(output.contains("Please have at least 3 participants. Current: 2"));
    assert_eq!(state, SessionState::Ended);
    assert_eq!(roster, vec!["Alice", "Bob"]);
}

#[test]
fn test_duplicate_names_are_rejected() {
    let (output, _, roster) = run_script("alice\nALICE\nlist\nend\n", SessionOptions::default());

    assert!(output.contains(
        "The name \"Alice\" is already in your participants list. Please type a unique name."
    ));
    assert_eq!(roster, vec!["Alice"]);
}

#[test]
fn test_list_and_remove() {
    let script = "list\nalice\nbob\nremove bob\nremove zed\nlist\nend\n";
    let (output, _, roster) = run_script(script, SessionOptions::default());

    assert!(output.contains("There are currently no participants in the list."));
    assert!(output.contains("Bob was removed from the participants list."));
    assert!(output.contains("Zed is not in the participants list."));
    assert_eq!(roster, vec!["Alice"]);
}

#[test]
fn test_play_lookups_in_both_directions() {
    let script = "alice\nbob\ncharlie\ndone\nalice\nget my santa\nalice\nzed\nend\n";
    let (output, state, _) = run_script(script, SessionOptions::default());

    let human_line = output
        .lines()
        .find(|line| line.starts_with("Your human is "))
        .expect("missing recipient lookup");
    let human = human_line.trim_start_matches("Your human is ");
    assert!(human == "Bob" || human == "Charlie");

    let santa_line = output
        .lines()
        .find(|line| line.starts_with("Your santa is "))
        .expect("missing giver lookup");
    let santa = santa_line.trim_start_matches("Your santa is ");
    assert!(santa == "Bob" || santa == "Charlie");
    // 三人時只有兩種循環，Alice 的收禮者與送禮者必不相同
    assert_ne!(human, santa);

    assert!(output.contains("Zed is not a participant. Please enter a valid name."));
    assert!(output.contains("Thanks for playing!"));
    assert_eq!(state, SessionState::Ended);
}

#[test]
fn test_edit_returns_to_setup_with_roster_kept() {
    let script = "alice\nbob\ncharlie\ndone\nedit\ndana\nlist\ndone\ndana\nend\n";
    let (output, _, roster) = run_script(script, SessionOptions::default());

    assert!(output.contains("Alice, Bob, Charlie, Dana"));
    assert!(output.contains("Your human is "));
    assert_eq!(roster.len(), 4);
}

#[test]
fn test_generate_new_solution_keeps_playing() {
    let script = "alice\nbob\ncharlie\ndone\ngenerate new solution\nbob\nend\n";
    let (output, state, _) = run_script(script, SessionOptions::default());

    assert!(output.contains("A new set of Santa and Human pairs was generated."));
    assert!(output.contains("Your human is "));
    assert_eq!(state, SessionState::Ended);
}

#[test]
fn test_configured_minimum_of_two_allows_swap() {
    let options = SessionOptions {
        min_participants: 2,
        seed: Some(3),
    };
    let (output, _, _) = run_script("alice\nbob\ndone\nalice\nend\n", options);

    assert!(output.contains("Your human is Bob"));
}

#[test]
fn test_end_during_setup_stops_immediately() {
    let (output, state, roster) = run_script("end\nalice\n", SessionOptions::default());

    assert!(output.starts_with("Usage:"));
    assert_eq!(state, SessionState::Ended);
    assert!(roster.is_empty());
}

#[test]
fn test_name_with_expanding_first_letter_can_look_up_pairing() {
    // ß 大寫會展開成 SS，登記與查詢必須得到同一個名字
    let script = "ßen\nbob\ncarl\ndone\nßen\nget my santa\nSSEN\nend\n";
    let (output, _, roster) = run_script(script, SessionOptions::default());

    assert_eq!(roster, vec!["Ssen", "Bob", "Carl"]);
    assert!(output.contains("Your human is "));
    assert!(output.contains("Your santa is "));
    assert!(!output.contains("is not a participant"));
}

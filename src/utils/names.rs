/// 將名字轉成顯示用格式：去除前後空白、首字大寫、其餘小寫
///
/// Only the first character of the uppercase expansion stays uppercase
/// (`ß` becomes `S` + `s`), so normalizing an already normalized name is a no-op.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut name = String::with_capacity(trimmed.len());
    name.extend(upper.next());
    let rest: String = upper.chain(chars).collect();
    name.push_str(&rest.to_lowercase());
    name
}

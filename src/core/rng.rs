use rand::rngs::StdRng;
use rand::SeedableRng;

/// 有設定 seed 時回傳可重現的 RNG，否則從系統熵初始化
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!("Using fixed RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub time_limit: Duration,
    pub round_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: Duration::from_secs(30),
            round_size: 5,
        }
    }
}

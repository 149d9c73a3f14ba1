//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current weather for a city; `request_id` keys the task
    FetchWeather { request_id: u64, city: String },
}

impl Effect {
    /// Task name the effect runs under.
    ///
    /// Fetches are keyed per request: spawning under an existing key cancels
    /// the running task, and an older search must be allowed to finish.
    pub fn task_name(&self) -> String {
        match self {
            Effect::FetchWeather { request_id, .. } => format!("weather_{request_id}"),
        }
    }
}

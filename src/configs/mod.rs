mod scenario;

pub use scenario::ScenarioConfig;

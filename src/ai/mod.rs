mod agent;
mod priority;

pub use agent::Agent;
pub use priority::{choose_column, Choice, PriorityAgent, Tier};

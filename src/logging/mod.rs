pub mod step_log;

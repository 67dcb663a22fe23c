//! Unit test modules.

mod achievements_test;
mod answer_check_test;
mod energy_test;
mod leagues_test;
mod prompt_test;
mod rollover_test;

mod error_assert;
mod log_util;
mod rng;
mod setup;
mod test_battle_builder;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_util::{
    LogMatch,
    assert_logs_since_start_eq,
    assert_logs_since_turn_eq,
    assert_new_logs_eq,
    assert_turn_logs_eq,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::TestBattleBuilder;

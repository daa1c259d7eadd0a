pub mod http_test_utils;
pub mod mock_rsvp_store;
pub mod mock_state_store;
pub mod test_logging;

pub mod form_state_manager;

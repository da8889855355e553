pub mod identity_event;

pub mod frontend_user;

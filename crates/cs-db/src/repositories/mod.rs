pub mod frontend_user_repository;

pub mod leaderboard_service;
pub mod score_service;
pub mod token_service;
pub mod user_service;

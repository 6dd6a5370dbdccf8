pub mod d400_user_stats;

pub use d400_user_stats::ui::UserStatsDashboard;

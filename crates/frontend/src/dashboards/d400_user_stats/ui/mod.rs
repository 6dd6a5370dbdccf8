mod dashboard;

pub use dashboard::UserStatsDashboard;

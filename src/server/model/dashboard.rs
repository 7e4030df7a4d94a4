use crate::model::dashboard::DashboardStatsDto;

/// Headline counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_staff: u64,
    /// Users created since the start of the current UTC month.
    pub new_staff_this_month: u64,
    pub active_schedules: u64,
    /// Notifications created in the last 30 days.
    pub notifications_sent: u64,
    pub total_documents: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_staff: self.total_staff,
            staff_trend: format!("+{} this month", self.new_staff_this_month),
            active_schedules: self.active_schedules,
            notifications_sent: self.notifications_sent,
            total_documents: self.total_documents,
        }
    }
}

//! Hour scaling and due-date arithmetic.

/// Working hours assumed per calendar day when converting effort to days.
pub const WORK_HOURS_PER_DAY: u32 = 8;

/// Upper bound on plan timelines. Keeps date arithmetic comfortably in
/// range and rejects nonsense input.
pub const MAX_TIMELINE_WEEKS: u32 = 520;

/// Scale a baseline hour estimate from the template's reference timeline
/// to the requested one, never dropping below one hour.
pub fn scale_hours(baseline: u32, timeline_weeks: u32, reference_weeks: u32) -> u32 {
    let scaled = u64::from(baseline) * u64::from(timeline_weeks) / u64::from(reference_weeks);
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Compute per-task due-date offsets in calendar days from the start date.
///
/// Effort is accumulated in task order and converted to working days at
/// [`WORK_HOURS_PER_DAY`], then stretched proportionally onto the requested
/// timeline so the final task lands at the end of the last week. Offsets
/// are clamped to be non-decreasing, which keeps every task's due date at
/// or after the due dates of the tasks it depends on.
pub fn due_offsets(scaled_hours: &[u32], timeline_weeks: u32) -> Vec<u32> {
    let total_work_days = scaled_hours
        .iter()
        .map(|hours| u64::from(*hours))
        .sum::<u64>()
        .div_ceil(u64::from(WORK_HOURS_PER_DAY))
        .max(1);
    let horizon_days = u64::from(timeline_weeks) * 7;

    let mut offsets = Vec::with_capacity(scaled_hours.len());
    let mut cumulative_hours = 0u64;
    let mut previous = 0u32;
    for hours in scaled_hours {
        cumulative_hours += u64::from(*hours);
        let work_days = cumulative_hours.div_ceil(u64::from(WORK_HOURS_PER_DAY));
        let stretched = work_days * horizon_days / total_work_days;
        let offset = u32::try_from(stretched).unwrap_or(u32::MAX).max(1).max(previous);
        offsets.push(offset);
        previous = offset;
    }

    offsets
}

use std::cell::RefCell;

thread_local! {
    pub static PERF_BOX_SCANS: RefCell<u64> = RefCell::new(0);
    pub static PERF_TRACE_POINTS: RefCell<u64> = RefCell::new(0);
}

#[inline]
pub(crate) fn count_box_scan() {
    PERF_BOX_SCANS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(1);
    });
}

#[inline]
pub(crate) fn count_trace_point() {
    PERF_TRACE_POINTS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(1);
    });
}

pub fn reset_collision_perf_counters() {
    PERF_BOX_SCANS.with(|c| *c.borrow_mut() = 0);
    PERF_TRACE_POINTS.with(|c| *c.borrow_mut() = 0);
}

/// Read and zero the counters for this thread: (box scans, trace points).
pub fn take_collision_perf_counters() -> (u64, u64) {
    let scans = PERF_BOX_SCANS.with(|c| std::mem::take(&mut *c.borrow_mut()));
    let points = PERF_TRACE_POINTS.with(|c| std::mem::take(&mut *c.borrow_mut()));
    (scans, points)
}

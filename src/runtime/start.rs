use std::panic;
use std::thread;

use core_affinity::CoreId;
use log::{trace, warn};

// fork-join: job(0) runs on the caller thread, job(1..thread_num) on scoped
// workers; returns once every id has finished
// a panic in any worker is re-raised on the caller after the join
pub fn start<F>(thread_num: usize, pin_threads: bool, job: F)
where
    F: Fn(usize) + Sync,
{
    let thread_num = thread_num.max(1);
    let core_ids = if pin_threads { core_ids() } else { None };

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(thread_num - 1);
        for thread_id in 1..thread_num {
            let core_id = core_ids.as_ref().map(|ids| ids[thread_id % ids.len()]);
            let job = &job;
            let handle = s.spawn(move || {
                if let Some(core_id) = core_id {
                    if !core_affinity::set_for_current(core_id) {
                        warn!("thread {} could not be pinned to core {}", thread_id, core_id.id);
                    }
                }
                trace!("thread {} start", thread_id);
                job(thread_id);
            });
            handles.push(handle);
        }

        job(0);

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });
}

fn core_ids() -> Option<Vec<CoreId>> {
    match core_affinity::get_core_ids() {
        Some(ids) if !ids.is_empty() => Some(ids),
        _ => {
            warn!("core ids unavailable, worker threads are not pinned");
            None
        }
    }
}

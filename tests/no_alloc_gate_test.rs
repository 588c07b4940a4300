use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_heart::core::{generate, Animator, HeartConfig};
use tui_heart::types::Style;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn animator_render_is_allocation_free_after_warmup() {
    let mut cfg = HeartConfig::for_style(Style::Deep);
    cfg.cloud.samples = 500;
    cfg.cloud.layers = 10;
    cfg.cloud.interior.count = 500;

    let cloud = generate(&cfg.cloud, &mut StdRng::seed_from_u64(1));
    let mut animator = Animator::new(cloud, &cfg);

    // Warm-up (scratch buffer fill).
    animator.render(0.0);

    let allocs = with_alloc_counting(|| {
        for i in 1..=100 {
            animator.render(i as f64 / 30.0);
        }
    });

    assert!(allocs == 0);
}

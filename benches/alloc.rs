//! Allocation-counting benchmarks for zillion.
//!
//! Measures the number of heap allocations and total bytes allocated for each
//! operation. Run with:
//!
//! ```sh
//! cargo bench --bench alloc
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use zillion::{Numeral, name_period, number_to_text, read_period, text_to_number};

// ---------------------------------------------------------------------------
// Counting allocator
// ---------------------------------------------------------------------------

struct CountingAllocator;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);
static ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);
static ACTIVE: AtomicUsize = AtomicUsize::new(0); // 0 = not counting

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if ACTIVE.load(Ordering::Relaxed) != 0 {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static A: CountingAllocator = CountingAllocator;

/// Reset counters, run `f`, return (allocs, bytes).
fn measure<F: FnOnce() -> T, T>(f: F) -> (T, usize, usize) {
    // Reset
    ALLOC_COUNT.store(0, Ordering::SeqCst);
    ALLOC_BYTES.store(0, Ordering::SeqCst);

    // Enable counting
    ACTIVE.store(1, Ordering::SeqCst);
    let result = f();
    ACTIVE.store(0, Ordering::SeqCst);

    let count = ALLOC_COUNT.load(Ordering::SeqCst);
    let bytes = ALLOC_BYTES.load(Ordering::SeqCst);
    (result, count, bytes)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_large_decimal(n: usize) -> String {
    let mut s = String::with_capacity(n + 1);
    for i in 0..n {
        if i == 3 {
            s.push('.');
        }
        s.push(char::from(b'0' + (((i % 9) + 1) as u8)));
    }
    s
}

struct Row {
    name: &'static str,
    allocs: usize,
    bytes: usize,
}

fn print_table(rows: &[Row]) {
    println!("{:<40} {:>8} {:>12}", "operation", "allocs", "bytes");
    println!("{:-<40} {:->8} {:->12}", "", "", "");
    for row in rows {
        println!("{:<40} {:>8} {:>12}", row.name, row.allocs, row.bytes);
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let mut rows = Vec::new();

    // Build the word tables and regexes outside of any measurement
    let _ = number_to_text("1.5");
    let _ = text_to_number("one and five tenths");

    // -- Period names --------------------------------------------------------

    let (_, allocs, bytes) = measure(|| name_period(4));
    rows.push(Row {
        name: "name_period(4)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| name_period(123_456_789));
    rows.push(Row {
        name: "name_period(123456789)",
        allocs,
        bytes,
    });

    let long_name = name_period(123_456_789);
    let (_, allocs, bytes) = measure(|| read_period(&long_name).unwrap());
    rows.push(Row {
        name: "read_period (3 groups)",
        allocs,
        bytes,
    });

    // -- Parsing -------------------------------------------------------------

    let (_, allocs, bytes) = measure(|| "123.456789".parse::<Numeral>().unwrap());
    rows.push(Row {
        name: "FromStr medium (\"123.456789\")",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| Numeral::from(123_456_789_u64));
    rows.push(Row {
        name: "From<u64> (123456789)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| Numeral::try_from(123.456_789_f64).unwrap());
    rows.push(Row {
        name: "TryFrom<f64> (123.456789)",
        allocs,
        bytes,
    });

    // -- Spelling ------------------------------------------------------------

    let (_, allocs, bytes) = measure(|| number_to_text(42).unwrap());
    rows.push(Row {
        name: "number_to_text small (42)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| number_to_text("123.456789").unwrap());
    rows.push(Row {
        name: "number_to_text medium",
        allocs,
        bytes,
    });

    let large_str = make_large_decimal(100);
    let (_, allocs, bytes) = measure(|| number_to_text(large_str.as_str()).unwrap());
    rows.push(Row {
        name: "number_to_text large (100 digits)",
        allocs,
        bytes,
    });

    let (_, allocs, bytes) = measure(|| number_to_text("1e3000003").unwrap());
    rows.push(Row {
        name: "number_to_text huge exponent",
        allocs,
        bytes,
    });

    // -- Reading -------------------------------------------------------------

    let medium_words = number_to_text("123.456789").unwrap();
    let (_, allocs, bytes) = measure(|| text_to_number(&medium_words).unwrap());
    rows.push(Row {
        name: "text_to_number medium",
        allocs,
        bytes,
    });

    let large_words = number_to_text(large_str.as_str()).unwrap();
    let (_, allocs, bytes) = measure(|| text_to_number(&large_words).unwrap());
    rows.push(Row {
        name: "text_to_number large (100 digits)",
        allocs,
        bytes,
    });

    // -- Round-trip ----------------------------------------------------------

    let (_, allocs, bytes) = measure(|| {
        let words = number_to_text("123.456789").unwrap();
        text_to_number(&words).unwrap()
    });
    rows.push(Row {
        name: "roundtrip: str -> words -> str",
        allocs,
        bytes,
    });

    // -- Print ---------------------------------------------------------------

    println!();
    println!("zillion allocation report");
    println!("=========================");
    println!();
    print_table(&rows);
    println!();
}

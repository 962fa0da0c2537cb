#![allow(dead_code)]

use stapl_stack::Stack;

pub fn init_tracing() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Returns a default stack holding `0..n`, bottom to top.
pub fn filled(n: usize) -> Stack<i64> {
    init_tracing();

    let mut stack = Stack::new();
    stack
        .extend_from((0..n).map(|i| i as i64))
        .expect("stack overflow while filling");
    stack
}

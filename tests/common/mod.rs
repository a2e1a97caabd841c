use std::sync;

static INIT_TESTS: sync::Once = sync::Once::new();

pub fn init_logging() {
    INIT_TESTS.call_once(|| {
        pretty_env_logger::formatted_builder()
            .is_test(true)
            .parse_filters("trace")
            .init();
    });
}

/// Renders `values` the way LinkedList's Display does.
#[allow(dead_code)]
pub fn render(values: &[i32]) -> String {
    let mut rendering = String::new();
    for value in values {
        rendering.push_str(&format!("{} -> ", value));
    }
    rendering.push_str("<end>");
    rendering
}

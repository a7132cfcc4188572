use std::thread;

use widget_config::render::{self, DEFAULT_GLOBAL_NAME};
use widget_config::{get, Config, Deployment, Endpoint, Target};

#[test]
fn get_returns_the_same_instance() {
    let first = get();
    let second = get();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

#[test]
fn get_matches_compiled_deployment() {
    assert_eq!(get(), &Config::for_deployment(Deployment::ACTIVE));
    assert_eq!(get().api_base_url, Deployment::ACTIVE.api_base_url());
}

#[test]
fn defaults() {
    let config = get();
    assert_eq!(config.endpoints.chat, "/chat");
    assert_eq!(config.endpoints.health, "/health");
    assert_eq!(config.endpoints.stats, "/stats");
    assert_eq!(config.endpoints.data, "/data");
    assert_eq!(config.max_message_length, 500);
    assert_eq!(config.typing_delay_ms, 1000);
    assert_eq!(config.session_timeout_ms, 30 * 60 * 1000);
}

#[test]
fn readers_on_many_threads_see_identical_values() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (get() as *const Config as usize, get().url(Endpoint::Chat))))
        .collect();

    for handle in handles {
        let (address, url) = handle.join().unwrap();
        assert_eq!(address, get() as *const Config as usize);
        assert_eq!(url, get().url(Endpoint::Chat));
    }
}

#[test]
fn module_and_global_expose_the_same_data() {
    let config = get();
    let json = render::render(config, Target::Json, DEFAULT_GLOBAL_NAME).unwrap();
    let payload = json.trim_end();

    for target in [Target::Module, Target::Global] {
        let script = render::render(config, target, DEFAULT_GLOBAL_NAME).unwrap();
        let start = script.find("deepFreeze({").unwrap() + "deepFreeze(".len();
        let embedded = &script[start..start + payload.len()];

        let embedded: serde_json::Value = serde_json::from_str(embedded).unwrap();
        let expected: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(embedded, expected, "{target}");
    }
}

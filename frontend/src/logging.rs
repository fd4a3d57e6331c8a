use tracing::Level;

/// Most verbose level forwarded to the browser console.
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Routes `tracing` events to the browser console. Call once, before rendering.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(max_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

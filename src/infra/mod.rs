// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   config_store.rs — GenerateConfig saved/loaded as pretty JSON
//   render.rs       — text / JSON / CSV output, stdout or file

pub mod config_store;

pub mod render;

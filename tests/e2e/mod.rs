// End-to-end tests for the BabelVoice Backend API
//
// Each test spawns the full axum stack on an ephemeral port with mock
// translation/speech repositories injected, so the tests exercise routing,
// validation, fan-out orchestration and storage without touching the real
// upstream APIs. Audio clips land in a per-test temp directory.

mod helpers;
mod test_languages;
mod test_translation;

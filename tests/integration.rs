//! Integration tests, aggregated into one test binary.

#[path = "integration/helpers.rs"]
mod helpers;

#[path = "integration/cli_test.rs"]
mod cli_test;
#[path = "integration/render_test.rs"]
mod render_test;
#[path = "integration/sampler_test.rs"]
mod sampler_test;
#[path = "integration/sequencer_test.rs"]
mod sequencer_test;

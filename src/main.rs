mod app;
mod audio;
mod config;
mod engine;
mod library;
mod runtime;
mod skin;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}

mod deploy;
mod setup;



// Engine tests
mod engine;


// History tests
mod history;

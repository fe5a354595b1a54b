mod activation;
mod selector;

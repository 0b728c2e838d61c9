pub mod weight_client;

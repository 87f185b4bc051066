pub mod command_queue;

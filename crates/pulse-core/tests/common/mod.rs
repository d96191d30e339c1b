pub mod plot_server;

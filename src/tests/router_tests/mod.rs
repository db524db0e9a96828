mod dashboard_tests;
mod refresh_tests;
mod routing_tests;

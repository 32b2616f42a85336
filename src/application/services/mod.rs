pub mod subscriber_service;

pub mod channel;

pub mod epg;

pub mod network;

pub mod order;

pub mod reservation;

pub mod user;

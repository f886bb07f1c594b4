mod appointment;
mod customer;
mod day_lock;
mod service;
mod settings;
mod staff;

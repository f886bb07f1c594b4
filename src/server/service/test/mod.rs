mod appointment;
mod guard;

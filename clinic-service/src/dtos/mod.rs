pub mod records;

pub use records::{
    AppointmentResponse, MediaResponse, NewAppointment, NewMedia, NewUser, StoreResponse,
    UserResponse,
};

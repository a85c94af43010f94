pub mod catalog;
pub mod dates;
pub mod envelope;
pub mod feedback;
pub mod i18n;
pub mod media;
pub mod publication;
pub mod user;

pub use catalog::{Course, CourseInput, Direction, DirectionInput};
pub use envelope::{Envelope, ListEnvelope};
pub use feedback::{Feedback, FeedbackInput};
pub use i18n::{Language, Message};
pub use media::{GalleryInput, GalleryItem, Media, MediaType, Partner, PartnerInput};
pub use publication::{NewsItem, Opportunity, PublicationInput};
pub use user::{EnrollRequest, ProfileUpdate, RegisterRequest, User, UserRole, UserStatus};

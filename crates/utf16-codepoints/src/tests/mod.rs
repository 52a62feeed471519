mod arbitrary;

mod property_fold;
mod property_streaming;

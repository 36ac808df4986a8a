mod external_id;
mod grade;
mod identity;
mod profile_record;
mod role;
mod serde_shape;
mod test;

/// Anything that is stored and looked up by a unique string identifier
pub trait Entity {
    fn id(&self) -> &str;
}

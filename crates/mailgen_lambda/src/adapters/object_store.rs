pub trait ObjectStore {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String> {
        (**self).put_object(key, body, content_type)
    }
}

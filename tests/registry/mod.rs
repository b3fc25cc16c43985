mod tests_extensions;
mod tests_features;
#[cfg(feature = "serde")]
mod tests_serialize;

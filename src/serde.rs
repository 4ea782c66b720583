use std::marker::PhantomData;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Stack;

// A stack serializes as its bare backing sequence, bottom to top, so the
// wire form is interchangeable with the container's own.
impl<T, C: Serialize> Serialize for Stack<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.seq.serialize(serializer)
    }
}

impl<'de, T, C: Deserialize<'de>> Deserialize<'de> for Stack<T, C> {
    fn deserialize<D>(deserializer: D) -> Result<Stack<T, C>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Stack {
            seq: C::deserialize(deserializer)?,
            marker: PhantomData,
        })
    }
}

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::access::FieldMap;
use crate::field::{Field, Kind};
use crate::info::FieldInfo;
use crate::record::Record;

// Every sweep walks the declarations once, in order, skipping hidden fields.

#[inline]
fn visible_len(record: &dyn Record) -> usize {
    record.record_info().iter_visible().count()
}

#[inline]
fn collect<V>(record: &dyn Record, mut f: impl FnMut(usize, &'static FieldInfo) -> Option<V>) -> FieldMap<V> {
    let mut map = FieldMap::with_capacity(visible_len(record));
    for (index, field) in record.record_info().iter_visible() {
        if let Some(value) = f(index, field) {
            map.push(field.name(), value);
        }
    }
    map
}

pub(crate) fn names(record: &dyn Record) -> Vec<&'static str> {
    record.record_info().visible_names().collect()
}

pub(crate) fn values(record: &dyn Record) -> FieldMap<Box<dyn Field>> {
    collect(record, |index, _| record.field_at(index).map(|value| value.clone_field()))
}

pub(crate) fn tags(record: &dyn Record, key: &str) -> FieldMap<&'static str> {
    collect(record, |_, field| Some(field.tag(key)))
}

pub(crate) fn kinds(record: &dyn Record) -> FieldMap<Kind> {
    collect(record, |_, field| Some(field.kind()))
}

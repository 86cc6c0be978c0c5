use fastview::ViewBinder;

use crate::{HostError, HostValue};

pub const MAKE_FAST_BUFFER: &str = "makeFastBuffer";

/// `makeFastBuffer(view, buffer, offset, typeOrCount, count?)`
///
/// With four arguments (or an undefined fifth) the fourth is the element count
/// and the view is bound as raw `uint8` with no alignment check. With five, the
/// fourth is a type tag: a string is resolved against the known tags,
/// `undefined` selects raw `uint8`, and anything else is an unrecognized tag.
pub fn make_fast_buffer<'v, 'b>(
    binder: &ViewBinder,
    args: Vec<HostValue<'v, 'b>>,
) -> Result<HostValue<'v, 'b>, HostError> {
    let mut args = args.into_iter();
    let mut next = || args.next().unwrap_or_default();
    let (view_arg, buffer_arg, offset_arg, type_arg, count_arg) =
        (next(), next(), next(), next(), next());

    let buffer = match buffer_arg {
        HostValue::Buffer(buffer) => buffer,
        _ => return Err(HostError::TypeError("Argument must be a Buffer".to_string())),
    };
    let view = match view_arg {
        HostValue::View(view) => view,
        other => {
            return Err(HostError::InvalidArgument(format!(
                "Argument must be a View, got {}",
                other.type_name()
            )))
        }
    };
    let offset = offset_arg.to_uint32() as usize;

    if count_arg.is_undefined() {
        let count = type_arg.to_uint32() as usize;
        log::trace!("makeFastBuffer: raw form, offset {}, count {}", offset, count);
        binder.bind_raw(view, buffer, offset, count)?;
        return Ok(HostValue::Undefined);
    }

    let count = count_arg.to_uint32() as usize;
    match type_arg {
        HostValue::Undefined => binder.bind_raw(view, buffer, offset, count)?,
        HostValue::String(tag) => binder.bind_tagged(view, buffer, offset, &tag, count)?,
        other => {
            let ty = binder.config().unrecognized_tag(other.type_name())?;
            binder.bind_typed(view, buffer, offset, ty, count)?
        }
    }
    Ok(HostValue::Undefined)
}

use crate::{BinderConfig, Binding, ElementType, View, ViewError};

/// Installs typed windows over byte buffers onto [`View`]s.
///
/// Every bind validates before it mutates: on error the view keeps whatever
/// binding it had.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct ViewBinder {
    config: BinderConfig,
}

impl ViewBinder {
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Binds `count` bytes at `offset` as `uint8`. No alignment check applies.
    pub fn bind_raw<'b>(
        &self,
        view: &mut View<'b>,
        buffer: &'b mut [u8],
        offset: usize,
        count: usize,
    ) -> Result<(), ViewError> {
        self.install(view, buffer, offset, ElementType::Uint8, count)
    }

    pub fn bind_typed<'b>(
        &self,
        view: &mut View<'b>,
        buffer: &'b mut [u8],
        offset: usize,
        ty: ElementType,
        count: usize,
    ) -> Result<(), ViewError> {
        if !ty.is_aligned(offset) {
            return Err(ViewError::Misaligned { offset, ty });
        }
        self.install(view, buffer, offset, ty, count)
    }

    /// Like [`ViewBinder::bind_typed`], with the type given by its textual tag.
    pub fn bind_tagged<'b>(
        &self,
        view: &mut View<'b>,
        buffer: &'b mut [u8],
        offset: usize,
        tag: &str,
        count: usize,
    ) -> Result<(), ViewError> {
        let ty = self.config.resolve_tag(tag)?;
        self.bind_typed(view, buffer, offset, ty, count)
    }

    fn install<'b>(
        &self,
        view: &mut View<'b>,
        buffer: &'b mut [u8],
        offset: usize,
        ty: ElementType,
        count: usize,
    ) -> Result<(), ViewError> {
        let buffer_length = buffer.len();
        let byte_length = count.checked_mul(ty.size_of());
        let end = byte_length.and_then(|n| n.checked_add(offset));
        let bytes = match end {
            Some(end) if end <= buffer_length => &mut buffer[offset..end],
            _ => {
                return Err(ViewError::OutOfRange {
                    offset,
                    byte_length,
                    buffer_length,
                })
            }
        };
        log::debug!(
            "Binding view: {} x {} at byte offset {} (buffer length {})",
            count,
            ty,
            offset,
            buffer_length
        );
        view.install(Binding::new(bytes, offset, ty, count));
        Ok(())
    }
}

pub fn bind_raw_view<'b>(
    view: &mut View<'b>,
    buffer: &'b mut [u8],
    offset: usize,
    count: usize,
) -> Result<(), ViewError> {
    ViewBinder::default().bind_raw(view, buffer, offset, count)
}

pub fn bind_typed_view<'b>(
    view: &mut View<'b>,
    buffer: &'b mut [u8],
    offset: usize,
    ty: ElementType,
    count: usize,
) -> Result<(), ViewError> {
    ViewBinder::default().bind_typed(view, buffer, offset, ty, count)
}

pub fn bind_tagged_view<'b>(
    view: &mut View<'b>,
    buffer: &'b mut [u8],
    offset: usize,
    tag: &str,
    count: usize,
) -> Result<(), ViewError> {
    ViewBinder::default().bind_tagged(view, buffer, offset, tag, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagPolicy;
    use strum::IntoEnumIterator;
    use test_strategy::{proptest, Arbitrary};

    #[derive(Arbitrary, Debug)]
    struct BindProblem {
        ty: ElementType,
        #[strategy(0usize..64)]
        offset: usize,
        #[strategy(0usize..8)]
        count: usize,
    }

    #[proptest(cases = 128)]
    fn test_typed_bind(prob: BindProblem) {
        let BindProblem { ty, offset, count } = prob;
        let mut buf = vec![0u8; 64 + 8 * 8];
        let mut view = View::new();
        let result = bind_typed_view(&mut view, &mut buf, offset, ty, count);
        if offset % ty.size_of() == 0 {
            assert!(result.is_ok());
            assert_eq!(view.len(), count);
            assert_eq!(view.byte_length(), count * ty.size_of());
        } else {
            assert_eq!(result, Err(ViewError::Misaligned { offset, ty }));
            assert!(!view.is_bound());
        }
    }

    #[test]
    fn raw_bind_ignores_alignment() {
        let mut buf = [0u8; 16];
        let mut view = View::new();
        bind_raw_view(&mut view, &mut buf, 3, 5).unwrap();
        assert_eq!(view.element_type(), Some(ElementType::Uint8));
        assert_eq!(view.byte_offset(), Some(3));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn every_type_binds_at_zero() {
        for ty in ElementType::iter() {
            let mut buf = [0u8; 16];
            let mut view = View::new();
            bind_typed_view(&mut view, &mut buf, 0, ty, 1).unwrap();
            assert_eq!(view.byte_length(), ty.size_of());
        }
    }

    #[test]
    fn range_past_end_is_rejected() {
        let mut buf = [0u8; 10];
        let mut view = View::new();
        let err = bind_typed_view(&mut view, &mut buf, 8, ElementType::Int32, 1).unwrap_err();
        assert_eq!(
            err,
            ViewError::OutOfRange {
                offset: 8,
                byte_length: Some(4),
                buffer_length: 10,
            }
        );
    }

    #[test]
    fn overflowing_count_is_rejected() {
        let mut buf = [0u8; 8];
        let mut view = View::new();
        let err = bind_typed_view(&mut view, &mut buf, 0, ElementType::Float64, usize::MAX)
            .unwrap_err();
        assert!(matches!(err, ViewError::OutOfRange { byte_length: None, .. }));
    }

    #[test]
    fn failed_bind_keeps_previous_binding() {
        let mut buf = [0u8; 8];
        let (head, tail) = buf.split_at_mut(4);
        let mut view = View::new();
        bind_typed_view(&mut view, head, 0, ElementType::Uint16, 2).unwrap();
        let err = bind_typed_view(&mut view, tail, 1, ElementType::Uint16, 1).unwrap_err();
        assert_eq!(err.to_string(), "Byte offset is not aligned.");
        assert_eq!(view.element_type(), Some(ElementType::Uint16));
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn strict_binder_rejects_unknown_tags() {
        let binder = ViewBinder::new(BinderConfig::new(TagPolicy::Strict));
        let mut buf = [0u8; 8];
        let mut view = View::new();
        let err = binder
            .bind_tagged(&mut view, &mut buf, 0, "int64", 1)
            .unwrap_err();
        assert_eq!(err, ViewError::UnknownElementType("int64".to_string()));
        assert!(!view.is_bound());
    }
}

use crate::{ElementType, Pixel, ViewElement, ViewError};

/// The aliasing state installed on a [`View`] by a successful bind.
///
/// `bytes` is exactly `[byte_offset, byte_offset + len * size)` of the
/// backing buffer, so index arithmetic never needs the buffer start.
#[derive(Debug)]
pub struct Binding<'b> {
    bytes: &'b mut [u8],
    byte_offset: usize,
    ty: ElementType,
    len: usize,
}

impl<'b> Binding<'b> {
    pub(crate) fn new(
        bytes: &'b mut [u8],
        byte_offset: usize,
        ty: ElementType,
        len: usize,
    ) -> Self {
        debug_assert_eq!(bytes.len(), len * ty.size_of());
        Self {
            bytes,
            byte_offset,
            ty,
            len,
        }
    }

    fn element_range(&self, index: usize) -> Result<std::ops::Range<usize>, ViewError> {
        if index >= self.len {
            return Err(ViewError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let size = self.ty.size_of();
        Ok(index * size..(index + 1) * size)
    }

    fn check_type<T: ViewElement>(&self) -> Result<(), ViewError> {
        if T::ty() != self.ty {
            return Err(ViewError::TypeMismatch {
                requested: T::ty(),
                bound: self.ty,
            });
        }
        Ok(())
    }
}

/// A typed window over a byte buffer.
///
/// A view starts unbound. Binding it (see [`crate::ViewBinder`]) makes its
/// indexed accesses read and write the buffer's bytes directly, in native byte
/// order. Rebinding replaces the previous window.
#[derive(Debug, Default)]
pub struct View<'b> {
    binding: Option<Binding<'b>>,
}

impl<'b> View<'b> {
    pub fn new() -> Self {
        Self { binding: None }
    }

    pub(crate) fn install(&mut self, binding: Binding<'b>) {
        self.binding = Some(binding);
    }

    fn try_binding(&self) -> Result<&Binding<'b>, ViewError> {
        self.binding.as_ref().ok_or(ViewError::Unbound)
    }

    fn try_binding_mut(&mut self) -> Result<&mut Binding<'b>, ViewError> {
        self.binding.as_mut().ok_or(ViewError::Unbound)
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn element_type(&self) -> Option<ElementType> {
        self.binding.as_ref().map(|b| b.ty)
    }

    /// Number of elements. Zero for an unbound view.
    pub fn len(&self) -> usize {
        self.binding.as_ref().map_or(0, |b| b.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn byte_offset(&self) -> Option<usize> {
        self.binding.as_ref().map(|b| b.byte_offset)
    }

    pub fn byte_length(&self) -> usize {
        self.binding.as_ref().map_or(0, |b| b.bytes.len())
    }

    pub fn as_bytes(&self) -> Result<&[u8], ViewError> {
        Ok(&*self.try_binding()?.bytes)
    }

    pub fn as_bytes_mut(&mut self) -> Result<&mut [u8], ViewError> {
        Ok(&mut *self.try_binding_mut()?.bytes)
    }

    pub fn get<T: ViewElement>(&self, index: usize) -> Result<T, ViewError> {
        let binding = self.try_binding()?;
        binding.check_type::<T>()?;
        let range = binding.element_range(index)?;
        Ok(bytemuck::pod_read_unaligned(&binding.bytes[range]))
    }

    pub fn set<T: ViewElement>(&mut self, index: usize, value: T) -> Result<(), ViewError> {
        let binding = self.try_binding_mut()?;
        binding.check_type::<T>()?;
        let range = binding.element_range(index)?;
        binding.bytes[range].copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Reads element `index` as a host number, whatever the bound type.
    pub fn get_number(&self, index: usize) -> Result<f64, ViewError> {
        let ty = self.try_binding()?.ty;
        match ty {
            ElementType::Int8 => self.get::<i8>(index).map(ViewElement::to_number),
            ElementType::Uint8 => self.get::<u8>(index).map(ViewElement::to_number),
            ElementType::Int16 => self.get::<i16>(index).map(ViewElement::to_number),
            ElementType::Uint16 => self.get::<u16>(index).map(ViewElement::to_number),
            ElementType::Int32 => self.get::<i32>(index).map(ViewElement::to_number),
            ElementType::Uint32 => self.get::<u32>(index).map(ViewElement::to_number),
            ElementType::Float32 => self.get::<f32>(index).map(ViewElement::to_number),
            ElementType::Float64 => self.get::<f64>(index).map(ViewElement::to_number),
            ElementType::Pixel => self.get::<Pixel>(index).map(ViewElement::to_number),
        }
    }

    /// Stores a host number into element `index`, converting it with the
    /// semantics of the bound type (wrapping ints, clamped pixels).
    pub fn set_number(&mut self, index: usize, value: f64) -> Result<(), ViewError> {
        let ty = self.try_binding()?.ty;
        match ty {
            ElementType::Int8 => self.set(index, i8::from_number(value)),
            ElementType::Uint8 => self.set(index, u8::from_number(value)),
            ElementType::Int16 => self.set(index, i16::from_number(value)),
            ElementType::Uint16 => self.set(index, u16::from_number(value)),
            ElementType::Int32 => self.set(index, i32::from_number(value)),
            ElementType::Uint32 => self.set(index, u32::from_number(value)),
            ElementType::Float32 => self.set(index, f32::from_number(value)),
            ElementType::Float64 => self.set(index, f64::from_number(value)),
            ElementType::Pixel => self.set(index, Pixel::from_number(value)),
        }
    }

    pub fn fill_number(&mut self, value: f64) -> Result<(), ViewError> {
        let len = self.try_binding()?.len;
        for i in 0..len {
            self.set_number(i, value)?;
        }
        Ok(())
    }

    pub fn to_numbers(&self) -> Result<Vec<f64>, ViewError> {
        let len = self.try_binding()?.len;
        (0..len).map(|i| self.get_number(i)).collect()
    }

    /// Borrows the window as a typed slice without copying.
    ///
    /// Fails with [`ViewError::Cast`] when the window's address is not aligned
    /// for `T` in memory, which an aligned byte offset alone does not ensure.
    pub fn try_as_slice<T: ViewElement>(&self) -> Result<&[T], ViewError> {
        let binding = self.try_binding()?;
        binding.check_type::<T>()?;
        bytemuck::try_cast_slice(&*binding.bytes).map_err(ViewError::Cast)
    }

    pub fn try_as_slice_mut<T: ViewElement>(&mut self) -> Result<&mut [T], ViewError> {
        let binding = self.try_binding_mut()?;
        binding.check_type::<T>()?;
        bytemuck::try_cast_slice_mut(&mut *binding.bytes).map_err(ViewError::Cast)
    }
}

use std::fmt;

use super::RuntimeError;

/// Number of distinct values a cell can hold, all cell arithmetic wraps around it
pub const CELL_MODULUS: i32 = 256;

/// Memory of the machine: grows to the right one cell at a time, never shrinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    /// Pointer into the heap, always `< heap.len()`
    data_pointer: usize,

    heap: Vec<u8>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Self {
            data_pointer: 0,
            heap: vec![0],
        }
    }

    pub fn reset(&mut self) {
        self.heap = vec![0];
        self.data_pointer = 0;
    }

    pub fn move_right(&mut self) {
        self.data_pointer += 1;
        if self.data_pointer == self.heap.len() {
            self.heap.push(0);
        }
    }

    pub fn move_left(&mut self) -> Result<(), RuntimeError> {
        match self.data_pointer.checked_sub(1) {
            Some(pointer) => {
                self.data_pointer = pointer;
                Ok(())
            }
            None => Err(RuntimeError::OutOfBounds),
        }
    }

    pub fn increment(&mut self) {
        self.heap[self.data_pointer] = self.heap[self.data_pointer].wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        self.heap[self.data_pointer] = self.heap[self.data_pointer].wrapping_sub(1);
    }

    /// Value of the cell under the data pointer
    pub fn read(&self) -> u8 {
        self.heap[self.data_pointer]
    }

    /// Store `value` reduced into `0..=255` under the data pointer
    pub fn write(&mut self, value: i32) {
        self.heap[self.data_pointer] = value.rem_euclid(CELL_MODULUS) as u8;
    }

    pub fn value_is_zero(&self) -> bool {
        self.read() == 0
    }

    pub fn data_pointer(&self) -> usize {
        self.data_pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.heap
    }
}

impl fmt::Display for Tape {
    /// `[0] [*3*] [7] `, the current cell is starred
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.heap.iter().enumerate() {
            if i == self.data_pointer {
                write!(f, "[*{}*] ", cell)?;
            } else {
                write!(f, "[{}] ", cell)?;
            }
        }
        Ok(())
    }
}

/**
 * This module contains all logic for loading image files into scene resources.
 */
pub mod texture;

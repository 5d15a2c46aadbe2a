pub use crate::assertion::{
    assert_equals, assert_equals_with_message, assert_not_equals, assert_not_equals_with_message,
    check_equals, check_not_equals, AssertionFailure,
};
pub use crate::difference::{
    compare, compare_rasters, image_difference, raster_difference, ChannelSums, Comparison,
    SMALL_VALUE,
};
pub use crate::error::{DiffError, ErrorKind, Role};
pub use crate::raster::RasterImage;
pub use crate::resource::{require_resource_file, resource_file};
pub use crate::{assert_image_eq, assert_image_ne};

//! Search operations

use reelgrid_domain::constants::SEARCH_URI;
use reelgrid_domain::{
    PagedList, Result, SearchDateType, SearchDurationType, SearchFacetType, SearchFilterType,
    SortDirection, SortType, Video,
};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::RequestDescriptor;
use crate::validation::{require_wire_value, validate_search_query};

/// Optional refinements applied to a search
#[derive(Debug, Clone, Default)]
pub struct SearchRefinements {
    /// Result ordering
    pub sort: Option<SortType>,
    /// Direction of the ordering
    pub direction: Option<SortDirection>,
    /// Upload-date window
    pub date: Option<SearchDateType>,
    /// Duration bucket (video searches only)
    pub duration: Option<SearchDurationType>,
    /// Facet groups to aggregate in the response
    pub facets: Vec<SearchFacetType>,
}

impl PlatformClient {
    /// Search the platform for videos.
    ///
    /// The query string must be non-empty; the filter type and every
    /// refinement enum must carry a wire value (an empty one is a contract
    /// violation in the calling code and halts loudly).
    pub fn search_videos<C>(
        &self,
        query: &str,
        filter: &SearchFilterType,
        refinements: SearchRefinements,
        options: FetchOptions,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Video>>) + Send + 'static,
    {
        let built = validate_search_query(query).map(|query| {
            let mut descriptor = RequestDescriptor::get(SEARCH_URI)
                .with_query_param("query", query)
                .with_query_param("filter", require_wire_value(filter));

            if let Some(sort) = &refinements.sort {
                descriptor = descriptor.with_query_param("sort", require_wire_value(sort));
            }
            if let Some(direction) = &refinements.direction {
                descriptor =
                    descriptor.with_query_param("direction", require_wire_value(direction));
            }
            if let Some(date) = &refinements.date {
                descriptor = descriptor.with_query_param("uploaded", require_wire_value(date));
            }
            if let Some(duration) = &refinements.duration {
                descriptor = descriptor.with_query_param("duration", require_wire_value(duration));
            }
            if !refinements.facets.is_empty() {
                let facets: Vec<&str> =
                    refinements.facets.iter().map(require_wire_value).collect();
                descriptor = descriptor.with_query_param("facets", facets.join(","));
            }

            options.apply(descriptor)
        });
        self.dispatch(built, callback)
    }
}

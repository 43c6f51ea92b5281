/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Multipart form construction
pub mod form;
/// Transport, interceptors and query encoding
pub mod http;
/// Request descriptors and body types
pub mod requests;
/// Response models
pub mod responses;

<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Upload page navigation link</description>
   <name>lnk_Upload</name>
   <tag></tag>
   <elementGuidId>common-nav-upload</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//a[contains(text(), 'Upload') or @href='/']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>a[href='/'], nav a:contains('Upload')</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>

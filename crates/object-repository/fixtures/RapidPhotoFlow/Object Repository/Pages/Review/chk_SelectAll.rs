<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Select all checkbox for bulk selection</description>
   <name>chk_SelectAll</name>
   <tag></tag>
   <elementGuidId>review-select-all</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='checkbox' and (ancestor::*[contains(text(), 'Select all')] or @aria-label='Select all')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='select-all'], input[aria-label='Select all']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
